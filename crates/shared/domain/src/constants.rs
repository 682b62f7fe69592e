//! Domain-level constants.
//!
//! These constants define document formats, business rules and the
//! user-facing messages shown next to form fields.

// =============================================================================
// User Roles
// =============================================================================

/// Role of a driver account
pub const ROLE_MOTORISTA: &str = "motorista";

/// Role of a gas station account
pub const ROLE_POSTO: &str = "posto";

// =============================================================================
// Document Formats
// =============================================================================

/// Number of digits in a CPF
pub const CPF_LENGTH: usize = 11;

/// Number of digits in a CNPJ
pub const CNPJ_LENGTH: usize = 14;

/// Number of digits in a CEP
pub const CEP_LENGTH: usize = 8;

/// Digits in a landline number (area code included)
pub const PHONE_LANDLINE_LENGTH: usize = 10;

/// Digits in a mobile number (area code included)
pub const PHONE_MOBILE_LENGTH: usize = 11;

/// Characters in a license plate, without separator
pub const LICENSE_PLATE_LENGTH: usize = 7;

// =============================================================================
// Password Rules
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const MSG_PASSWORD_MIN_LENGTH: &str = "Mínimo 8 caracteres";
pub const MSG_PASSWORD_UPPERCASE: &str = "Uma letra maiúscula";
pub const MSG_PASSWORD_DIGIT: &str = "Um número";

// =============================================================================
// Form Messages
// =============================================================================

pub const MSG_NAME_REQUIRED: &str = "Nome é obrigatório";
pub const MSG_CPF_REQUIRED: &str = "CPF é obrigatório";
pub const MSG_CPF_INVALID: &str = "CPF inválido";
pub const MSG_CNPJ_REQUIRED: &str = "CNPJ é obrigatório";
pub const MSG_CNPJ_INVALID: &str = "CNPJ inválido";
pub const MSG_PHONE_REQUIRED: &str = "Telefone é obrigatório";
pub const MSG_PHONE_INVALID: &str = "Telefone inválido";
pub const MSG_EMAIL_REQUIRED: &str = "Email é obrigatório";
pub const MSG_EMAIL_INVALID: &str = "Email inválido";
pub const MSG_PASSWORD_REQUIRED: &str = "Senha é obrigatória";
pub const MSG_PASSWORD_CONFIRMATION_REQUIRED: &str = "Confirmação de senha é obrigatória";
pub const MSG_PASSWORD_MISMATCH: &str = "As senhas não coincidem";
pub const MSG_PLATE_INVALID: &str = "Placa inválida";
pub const MSG_STATION_NAME_REQUIRED: &str = "Nome do posto é obrigatório";
pub const MSG_ADDRESS_REQUIRED: &str = "Endereço é obrigatório";
pub const MSG_CEP_INVALID: &str = "CEP inválido";
pub const MSG_UF_INVALID: &str = "UF inválida";
pub const MSG_BRAND_REQUIRED: &str = "Tipo de bandeira é obrigatório";
pub const MSG_MANAGER_NAME_REQUIRED: &str = "Nome do responsável é obrigatório";
pub const MSG_MANAGER_PHONE_REQUIRED: &str = "Telefone do responsável é obrigatório";

// =============================================================================
// Duplicate Detection
// =============================================================================

pub const MSG_EMAIL_TAKEN: &str = "Email já cadastrado no sistema";
pub const MSG_CPF_TAKEN: &str = "CPF já cadastrado no sistema";
pub const MSG_CNPJ_TAKEN: &str = "CNPJ já cadastrado no sistema";
pub const MSG_PHONE_TAKEN: &str = "Telefone já cadastrado no sistema";

// =============================================================================
// Station Profile Labels
// =============================================================================

pub const LABEL_CEP: &str = "CEP";
pub const LABEL_STREET: &str = "Logradouro";
pub const LABEL_NUMBER: &str = "Número";
pub const LABEL_DISTRICT: &str = "Bairro";
pub const LABEL_CITY: &str = "Cidade";
pub const LABEL_UF: &str = "UF";
pub const LABEL_BRAND: &str = "Bandeira";
pub const LABEL_LATITUDE: &str = "Latitude";
pub const LABEL_LONGITUDE: &str = "Longitude";

/// Federative units accepted in an address
pub const BRAZILIAN_STATES: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Check if a federative unit abbreviation is valid (case-insensitive)
pub fn is_valid_uf(uf: &str) -> bool {
    let uf = uf.trim().to_ascii_uppercase();
    BRAZILIAN_STATES.contains(&uf.as_str())
}
