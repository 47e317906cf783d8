pub mod city;
pub mod errors;
pub mod shared;
