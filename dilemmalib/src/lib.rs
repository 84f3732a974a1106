//! dilemmalib — поиск ожидаемых платежей, которые в сумме дают банковский перевод
//! (задача о сумме подмножества на точных десятичных суммах).

pub mod error;
pub mod model;
pub mod solution;
pub mod traits;

pub mod strategy {
    pub mod brute_force;
    pub mod recursive;
}

pub mod formats {
    pub mod csv;
    pub mod text;
    pub mod xml;
}
