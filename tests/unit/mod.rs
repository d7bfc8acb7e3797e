mod action_tests;
mod day_status_codec_tests;
mod sizing_tests;
