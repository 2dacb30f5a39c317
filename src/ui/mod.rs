pub mod assets;
pub mod components;
pub mod pages;
pub mod shell;
pub mod theme;
