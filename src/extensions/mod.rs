pub mod element_ext;
pub mod url_ext;
