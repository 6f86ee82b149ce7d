pub mod range_sample;
pub mod tone_generate;
