pub mod notes;

pub use notes::NotesState;
