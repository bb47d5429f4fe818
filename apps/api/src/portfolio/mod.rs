pub mod assembler;
pub mod handlers;
pub mod sections;
pub mod themes;
