/// Filesystem adapters for reading the project and writing the report
mod file_reader;
mod stdout_presenter;

pub use file_reader::FileSystemReader;
pub use stdout_presenter::StdoutPresenter;
