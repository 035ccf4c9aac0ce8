use crate::domain::model::MissingInputPolicy;
use crate::utils::error::Result;
use std::io::BufRead;

/// A named text source of newline-delimited masses.
pub trait MassSource {
    type Reader: BufRead;

    fn describe(&self) -> String;
    fn open(&self) -> Result<Self::Reader>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn missing_input_policy(&self) -> MissingInputPolicy;
    fn verbose(&self) -> bool;
}
