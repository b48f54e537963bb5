pub mod microlp_backend;
