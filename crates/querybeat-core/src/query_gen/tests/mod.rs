mod query_generator_config_tests;
