pub mod a001_fight;
