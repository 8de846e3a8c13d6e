pub mod help;
pub mod ls;
pub mod cd;
pub mod pwd;
pub mod tree;
pub mod find;
pub mod cat;
pub mod edit;
pub mod mkdir;
pub mod touch;
pub mod rm;
pub mod rmdir;
pub mod cp;
pub mod mv;
pub mod install;
pub mod echo;
