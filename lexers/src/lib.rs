mod scanner;
mod helpers;
mod infix_tokenizer;
mod postfix_tokenizer;

pub use scanner::Scanner;
pub use infix_tokenizer::{InfixTokenizer, InfixToken};
pub use postfix_tokenizer::{PostfixTokenizer, PostfixToken};

pub use helpers::scan_number;
