
mod arguments;
mod operations;
