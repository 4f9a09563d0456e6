mod segment;
mod webhook;
