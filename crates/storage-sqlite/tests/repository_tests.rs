//! Repository-level tests for the account store and transaction log.

mod common;

use ledger_core::accounts::{AccountServiceTrait, NewAccount};
use ledger_core::errors::DatabaseError;
use ledger_core::ledger::LedgerServiceTrait;
use ledger_core::transactions::TransactionServiceTrait;
use ledger_core::Error;
use rust_decimal_macros::dec;

// ==================== Account store ====================

#[tokio::test]
async fn test_create_account_starts_at_zero() {
    let ledger = common::setup();
    let account = ledger
        .accounts
        .create_account(NewAccount::new("EUR"))
        .await
        .unwrap();

    assert_eq!(account.balance, dec!(0));
    assert_eq!(account.currency, "EUR");
    assert!(!account.id.is_empty());

    let fetched = ledger.accounts.get_account(&account.id).unwrap();
    assert_eq!(fetched, account);
}

#[tokio::test]
async fn test_create_account_with_explicit_id() {
    let ledger = common::setup();
    let account = ledger
        .accounts
        .create_account(NewAccount {
            id: Some("acct-1".to_string()),
            currency: "USD".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(account.id, "acct-1");
}

#[tokio::test]
async fn test_create_account_invalid_currency_rejected() {
    let ledger = common::setup();
    let err = ledger
        .accounts
        .create_account(NewAccount::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_get_account_not_found() {
    let ledger = common::setup();
    let err = ledger.accounts.get_account("missing").unwrap_err();
    assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
}

#[tokio::test]
async fn test_save_inserts_then_updates() {
    let ledger = common::setup();

    let mut account = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();

    // Upsert an existing id updates the balance in place.
    account.balance = dec!(12.34);
    ledger.accounts.save_account(account.clone()).await.unwrap();
    assert_eq!(
        ledger.accounts.get_account(&account.id).unwrap().balance,
        dec!(12.34)
    );

    // Upsert of an unknown id inserts.
    let mut fresh = account.clone();
    fresh.id = "imported-account".to_string();
    fresh.balance = dec!(5);
    ledger.accounts.save_account(fresh).await.unwrap();
    assert_eq!(
        ledger
            .accounts
            .get_account("imported-account")
            .unwrap()
            .balance,
        dec!(5)
    );
}

#[tokio::test]
async fn test_list_orders_by_currency_then_balance_desc() {
    let ledger = common::setup();
    let usd_low = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let usd_high = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let eur = ledger
        .accounts
        .create_account(NewAccount::new("EUR"))
        .await
        .unwrap();

    ledger.ledger.deposit(&usd_low.id, dec!(9)).await.unwrap();
    // 30 > 9 numerically but sorts before "9" as text; guards against
    // lexicographic ordering of the stored balances.
    ledger.ledger.deposit(&usd_high.id, dec!(30)).await.unwrap();
    ledger.ledger.deposit(&eur.id, dec!(1)).await.unwrap();

    let all = ledger.accounts.get_all_accounts().unwrap();
    let ids: Vec<&str> = all.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec![&eur.id, &usd_high.id, &usd_low.id]);
}

#[tokio::test]
async fn test_list_by_currency_excluding() {
    let ledger = common::setup();
    let usd_a = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let usd_b = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let _eur = ledger
        .accounts
        .create_account(NewAccount::new("EUR"))
        .await
        .unwrap();

    let peers = ledger
        .accounts
        .get_accounts_by_currency_excluding(&usd_a.id, "USD")
        .unwrap();
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].id, usd_b.id);
}

#[tokio::test]
async fn test_max_balance_per_currency_returns_ties() {
    let ledger = common::setup();

    // USD balances {70, 30, 70}: both 70s must come back.
    let usd_1 = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let usd_2 = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let usd_3 = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let eur = ledger
        .accounts
        .create_account(NewAccount::new("EUR"))
        .await
        .unwrap();

    ledger.ledger.deposit(&usd_1.id, dec!(70)).await.unwrap();
    ledger.ledger.deposit(&usd_2.id, dec!(30)).await.unwrap();
    ledger.ledger.deposit(&usd_3.id, dec!(70)).await.unwrap();
    ledger.ledger.deposit(&eur.id, dec!(5)).await.unwrap();

    let top = ledger.accounts.get_max_balance_per_currency().unwrap();
    assert_eq!(top.len(), 3);

    let usd_top: Vec<&str> = top
        .iter()
        .filter(|a| a.currency == "USD")
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(usd_top.len(), 2);
    assert!(usd_top.contains(&usd_1.id.as_str()));
    assert!(usd_top.contains(&usd_3.id.as_str()));

    assert!(top.iter().any(|a| a.id == eur.id));
}

#[tokio::test]
async fn test_delete_account_keeps_transaction_records() {
    let ledger = common::setup();
    let account = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    ledger.ledger.deposit(&account.id, dec!(10)).await.unwrap();

    ledger.accounts.delete_account(&account.id).await.unwrap();

    assert!(ledger.accounts.get_account(&account.id).is_err());
    // The log keeps the record; its account ids are historical snapshots.
    let log = ledger
        .transactions
        .get_transactions_by_account(&account.id)
        .unwrap();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn test_delete_all_accounts() {
    let ledger = common::setup();
    ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    ledger
        .accounts
        .create_account(NewAccount::new("EUR"))
        .await
        .unwrap();

    let deleted = ledger.accounts.delete_all_accounts().await.unwrap();
    assert_eq!(deleted, 2);
    assert!(ledger.accounts.get_all_accounts().unwrap().is_empty());
}

// ==================== Transaction log ====================

#[tokio::test]
async fn test_get_transaction_by_id() {
    let ledger = common::setup();
    let account = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let record = ledger.ledger.deposit(&account.id, dec!(10)).await.unwrap();

    let fetched = ledger.transactions.get_transaction(&record.id).unwrap();
    assert_eq!(fetched, record);

    let err = ledger.transactions.get_transaction("missing").unwrap_err();
    assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
}

#[tokio::test]
async fn test_get_all_is_oldest_first() {
    let ledger = common::setup();
    let account = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let first = ledger.ledger.deposit(&account.id, dec!(1)).await.unwrap();
    let second = ledger.ledger.deposit(&account.id, dec!(2)).await.unwrap();

    let all = ledger.transactions.get_all_transactions().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[tokio::test]
async fn test_get_by_account_matches_both_directions() {
    let ledger = common::setup();
    let a = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let b = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let c = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();

    ledger.ledger.deposit(&a.id, dec!(50)).await.unwrap();
    ledger.ledger.transfer(&a.id, &b.id, dec!(10)).await.unwrap();
    ledger.ledger.deposit(&c.id, dec!(5)).await.unwrap();

    // b only appears as a target, yet sees the incoming transfer.
    let log_b = ledger.transactions.get_transactions_by_account(&b.id).unwrap();
    assert_eq!(log_b.len(), 1);
    assert_eq!(log_b[0].source_account_id, a.id);

    // a sees both of its records, unrelated c's deposit is absent.
    let log_a = ledger.transactions.get_transactions_by_account(&a.id).unwrap();
    assert_eq!(log_a.len(), 2);
}

#[tokio::test]
async fn test_delete_transaction_and_delete_all() {
    let ledger = common::setup();
    let account = ledger
        .accounts
        .create_account(NewAccount::new("USD"))
        .await
        .unwrap();
    let first = ledger.ledger.deposit(&account.id, dec!(1)).await.unwrap();
    let _second = ledger.ledger.deposit(&account.id, dec!(2)).await.unwrap();

    ledger
        .transactions
        .delete_transaction(&first.id)
        .await
        .unwrap();
    assert_eq!(ledger.transactions.get_all_transactions().unwrap().len(), 1);

    let deleted = ledger
        .transactions
        .delete_all_transactions()
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    assert!(ledger.transactions.get_all_transactions().unwrap().is_empty());
}
