pub mod firestore;
pub mod settings;
