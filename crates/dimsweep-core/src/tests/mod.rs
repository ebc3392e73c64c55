mod color;
mod table;
