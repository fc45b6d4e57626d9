pub mod cartoon_type;
