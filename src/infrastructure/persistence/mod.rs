//! Repository implementations.
//!
//! Concrete implementations of the domain repository traits. The PostgreSQL
//! repositories use SQLx runtime queries; the memory repositories keep
//! everything in process and back `STORAGE_BACKEND=memory` and the test suite.
//!
//! # Repositories
//!
//! - [`PgContactRepository`] - Contacts in PostgreSQL
//! - [`PgUserRepository`] - Users in PostgreSQL
//! - [`MemoryContactRepository`] - Contacts in memory
//! - [`MemoryUserRepository`] - Users in memory

pub mod memory_contact_repository;
pub mod memory_user_repository;
pub mod pg_contact_repository;
pub mod pg_user_repository;

pub use memory_contact_repository::MemoryContactRepository;
pub use memory_user_repository::MemoryUserRepository;
pub use pg_contact_repository::PgContactRepository;
pub use pg_user_repository::PgUserRepository;
