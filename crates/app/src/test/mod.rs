//! Test infrastructure shared by database-backed tests.


pub(crate) use db::TestDb;
