pub mod bookstore;
pub mod command;
pub mod controller;
pub mod domain;
pub mod repository;
