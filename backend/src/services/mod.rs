pub mod sendfile;
