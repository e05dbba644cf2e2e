//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site makes a single kind of request: a multipart POST of the contact
//! form. `contact` owns the transport and the submit workflow around it.

pub mod contact;
