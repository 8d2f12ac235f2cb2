use super::*;

mod add_paper;
mod transfer;
