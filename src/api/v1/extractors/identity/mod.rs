/*!
 * Identity extractors
 *
 * Responsibility:
 * - hand the gate's Identity to handlers (CurrentIdentity)
 * - turn it into authorization decisions: AuthUser (401), AdminUser / SuperAdminUser (401 / 403)
 */

mod core;
mod roles;

pub use core::{AuthUser, CurrentIdentity};
pub use roles::{AdminUser, SuperAdminUser};
