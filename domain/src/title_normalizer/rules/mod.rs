pub mod case;
pub mod whitespace;
