mod args;
mod parsers;
mod value_enum;

pub use args::Args;
pub use parsers::parse_limit;
pub use value_enum::CliReportFormat;
