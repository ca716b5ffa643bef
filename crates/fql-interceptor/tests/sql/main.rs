mod fixtures;
mod rendering;
