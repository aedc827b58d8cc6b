//! Tests for account domain models.

#[cfg(test)]
mod tests {
    use crate::accounts::NewAccount;
    use crate::errors::ValidationError;
    use crate::Error;

    #[test]
    fn test_new_account_valid() {
        let new_account = NewAccount::new("USD");
        assert!(new_account.validate().is_ok());
        assert!(new_account.id.is_none());
    }

    #[test]
    fn test_new_account_empty_currency_rejected() {
        let new_account = NewAccount::new("");
        let err = new_account.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_new_account_blank_currency_rejected() {
        let new_account = NewAccount::new("   ");
        assert!(new_account.validate().is_err());
    }

    #[test]
    fn test_new_account_with_explicit_id() {
        let new_account = NewAccount {
            id: Some("fixed-id".to_string()),
            currency: "EUR".to_string(),
        };
        assert!(new_account.validate().is_ok());
        assert_eq!(new_account.id.as_deref(), Some("fixed-id"));
    }
}
