pub mod materials;
pub mod simulate;
