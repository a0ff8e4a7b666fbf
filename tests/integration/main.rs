mod arg_tests;
mod invalid_config_tests;
mod util;
