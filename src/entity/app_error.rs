#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Confirmation failed: {0}")]
    ConfirmationFailed(String),

    #[error("Transaction reverted: {0}")]
    TransactionReverted(String),

    #[error("Address file error")]
    AddressFile(#[from] std::io::Error),

    #[error("Terminal input closed")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn address_file_error_names_the_io_cause_once() {
        let cause = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = anyhow::Error::from(AppError::from(cause));
        assert_eq!(format!("{:#}", err), "Address file error: gone");
    }
}
