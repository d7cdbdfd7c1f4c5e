mod read_links_tests;
