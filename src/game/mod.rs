// Game logic: the characters driven by the engine

pub mod characters;
