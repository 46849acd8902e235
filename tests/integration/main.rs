//! End-to-end tests against the full router, backed by a flat-file store and
//! local upload storage in a temporary directory. The PostgreSQL store tests
//! also need `DATABASE_URL`.

mod helpers;
mod hub_test;
mod page_test;
mod pg_store_test;
mod upload_test;
