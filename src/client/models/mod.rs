pub mod photo_file;
