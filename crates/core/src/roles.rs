//! Funcionario cargo (role) names.
//!
//! Cargos are stored as plain strings on the `funcionarios` table and embedded
//! in JWT claims. Keep the set small; authorization checks compare against
//! these constants rather than re-reading the database.

/// Full access: funcionario management, deletes, everything else.
pub const CARGO_ADMIN: &str = "admin";

/// Front-desk staff: clients, pets, products, sales, support requests.
pub const CARGO_ATENDENTE: &str = "atendente";

/// Veterinary staff: appointments and pet records.
pub const CARGO_VETERINARIO: &str = "veterinario";

/// All valid cargo names.
pub const VALID_CARGOS: &[&str] = &[CARGO_ADMIN, CARGO_ATENDENTE, CARGO_VETERINARIO];

/// Check whether a cargo name is one of the known roles.
pub fn is_valid_cargo(cargo: &str) -> bool {
    VALID_CARGOS.contains(&cargo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cargos_are_valid() {
        assert!(is_valid_cargo(CARGO_ADMIN));
        assert!(is_valid_cargo(CARGO_ATENDENTE));
        assert!(is_valid_cargo(CARGO_VETERINARIO));
    }

    #[test]
    fn unknown_cargo_is_rejected() {
        assert!(!is_valid_cargo("gerente"));
        assert!(!is_valid_cargo(""));
        assert!(!is_valid_cargo("Admin"));
    }
}
