pub mod extraction;
pub mod batch; // Concurrent multi-document extraction
