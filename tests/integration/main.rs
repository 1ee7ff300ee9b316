mod bot;
mod cli;
mod common;
mod desk;
mod persist;
