pub mod ast;
pub mod parser;
pub mod reserved;
pub mod scanner;
pub mod token;
