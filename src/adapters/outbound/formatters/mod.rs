/// Formatter adapters for the outdated report
mod table_formatter;

pub use table_formatter::TableFormatter;
