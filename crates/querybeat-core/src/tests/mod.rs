mod end_to_end_tests;
mod load_state_tests;
