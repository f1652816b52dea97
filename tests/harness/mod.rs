#![allow(dead_code, unused_imports)]

pub(crate) mod git_repository;

pub(crate) use test_context::TestContext;
