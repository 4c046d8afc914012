#![allow(dead_code)]

pub mod fake_tumblr;
pub mod fixtures;
pub mod http_responder;
