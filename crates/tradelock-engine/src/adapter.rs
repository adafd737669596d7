//! Value transfer adapter — uniform custody over native and token value.
//!
//! The engine never talks to a payment channel or token ledger directly.
//! Everything goes through [`ValueAdapter`], which drives a
//! [`TransferBackend`] and keeps its own custody counters so the escrowed
//! total is always checkable against the ledger.
//!
//! [`InMemoryBank`] is the reference backend: HashMap balances plus
//! ERC20-style allowances. Production embeddings supply their own backend
//! bridging to the real platform.

use std::collections::HashMap;

use tradelock_types::{AccountId, AssetKind, EscrowError, Result, TokenAddress};

/// External value-moving collaborators, as seen by the adapter.
///
/// Semantics mirror the ERC20 surface plus a native payment channel:
/// `token_transfer_from` is an allowance-consuming pull, `token_transfer`
/// a plain push, `native_transfer` a direct balance move.
pub trait TransferBackend {
    /// Pull `amount` of `token` from `from` to `to`, consuming allowance
    /// that `from` granted to `to`.
    fn token_transfer_from(
        &mut self,
        token: TokenAddress,
        from: AccountId,
        to: AccountId,
        amount: u128,
    ) -> Result<()>;

    /// Push `amount` of `token` from `from` to `to`.
    fn token_transfer(
        &mut self,
        token: TokenAddress,
        from: AccountId,
        to: AccountId,
        amount: u128,
    ) -> Result<()>;

    fn token_balance_of(&self, token: TokenAddress, account: AccountId) -> u128;

    /// Move `amount` of native currency from `from` to `to`.
    fn native_transfer(&mut self, from: AccountId, to: AccountId, amount: u128) -> Result<()>;

    fn native_balance_of(&self, account: AccountId) -> u128;
}

// ---------------------------------------------------------------------------
// InMemoryBank
// ---------------------------------------------------------------------------

/// In-memory reference backend: native balances, token balances, and
/// ERC20-style allowances. All mutations are atomic — either the full
/// transfer succeeds or nothing changes.
#[derive(Debug, Default)]
pub struct InMemoryBank {
    native: HashMap<AccountId, u128>,
    tokens: HashMap<(TokenAddress, AccountId), u128>,
    /// (token, owner, spender) → approved amount.
    allowances: HashMap<(TokenAddress, AccountId, AccountId), u128>,
}

impl InMemoryBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit native currency out of thin air (funding for tests and
    /// simulations).
    pub fn mint_native(&mut self, account: AccountId, amount: u128) {
        *self.native.entry(account).or_default() += amount;
    }

    /// Credit token balance out of thin air.
    pub fn mint_token(&mut self, token: TokenAddress, account: AccountId, amount: u128) {
        *self.tokens.entry((token, account)).or_default() += amount;
    }

    /// Owner approves `spender` to pull up to `amount` of `token`.
    pub fn approve(
        &mut self,
        token: TokenAddress,
        owner: AccountId,
        spender: AccountId,
        amount: u128,
    ) {
        self.allowances.insert((token, owner, spender), amount);
    }

    /// Remaining approved amount for (token, owner, spender).
    #[must_use]
    pub fn allowance(&self, token: TokenAddress, owner: AccountId, spender: AccountId) -> u128 {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or(0)
    }

    fn debit_token(&mut self, token: TokenAddress, from: AccountId, amount: u128) -> Result<()> {
        let balance = self.tokens.entry((token, from)).or_default();
        if *balance < amount {
            return Err(EscrowError::InsufficientBalance {
                needed: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }
}

impl TransferBackend for InMemoryBank {
    fn token_transfer_from(
        &mut self,
        token: TokenAddress,
        from: AccountId,
        to: AccountId,
        amount: u128,
    ) -> Result<()> {
        let approved = self.allowance(token, from, to);
        if approved < amount {
            return Err(EscrowError::InsufficientAllowance {
                needed: amount,
                approved,
            });
        }
        // Check the balance before consuming allowance so a failed pull
        // leaves the approval intact.
        self.debit_token(token, from, amount)?;
        self.allowances.insert((token, from, to), approved - amount);
        *self.tokens.entry((token, to)).or_default() += amount;
        Ok(())
    }

    fn token_transfer(
        &mut self,
        token: TokenAddress,
        from: AccountId,
        to: AccountId,
        amount: u128,
    ) -> Result<()> {
        self.debit_token(token, from, amount)?;
        *self.tokens.entry((token, to)).or_default() += amount;
        Ok(())
    }

    fn token_balance_of(&self, token: TokenAddress, account: AccountId) -> u128 {
        self.tokens.get(&(token, account)).copied().unwrap_or(0)
    }

    fn native_transfer(&mut self, from: AccountId, to: AccountId, amount: u128) -> Result<()> {
        let balance = self.native.entry(from).or_default();
        if *balance < amount {
            return Err(EscrowError::InsufficientBalance {
                needed: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        *self.native.entry(to).or_default() += amount;
        Ok(())
    }

    fn native_balance_of(&self, account: AccountId) -> u128 {
        self.native.get(&account).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// ValueAdapter
// ---------------------------------------------------------------------------

/// Custody adapter: deposits into the engine vault, pays out of it, and
/// tracks exactly how much the vault holds per asset.
///
/// The counters are the adapter's own books, independent of the backend's.
/// They must equal the ledger's escrowed totals at all times; a counter
/// underflow means custody accounting is corrupt and surfaces as
/// [`EscrowError::Internal`] rather than being papered over.
pub struct ValueAdapter<B: TransferBackend> {
    backend: B,
    /// The account that holds all escrowed value.
    vault: AccountId,
    held_native: u128,
    held_tokens: HashMap<TokenAddress, u128>,
}

impl<B: TransferBackend> ValueAdapter<B> {
    #[must_use]
    pub fn new(backend: B, vault: AccountId) -> Self {
        Self {
            backend,
            vault,
            held_native: 0,
            held_tokens: HashMap::new(),
        }
    }

    /// Pull `amount` of `asset` from `from` into the vault.
    ///
    /// Native: the attached payment must equal `amount` exactly.
    /// Token: the call is non-payable (`attached_payment` must be 0) and
    /// the pull consumes allowance `from` granted to the vault.
    ///
    /// # Errors
    /// `AmountMismatch`, `InsufficientBalance`, `InsufficientAllowance`,
    /// `TransferFailed`.
    pub fn deposit(
        &mut self,
        from: AccountId,
        asset: AssetKind,
        amount: u128,
        attached_payment: u128,
    ) -> Result<()> {
        match asset {
            AssetKind::Native => {
                if attached_payment != amount {
                    return Err(EscrowError::AmountMismatch {
                        declared: amount,
                        attached: attached_payment,
                    });
                }
                self.backend.native_transfer(from, self.vault, amount)?;
                self.held_native = self.checked_held_add(self.held_native, amount)?;
            }
            AssetKind::Token(token) => {
                if attached_payment != 0 {
                    return Err(EscrowError::AmountMismatch {
                        declared: 0,
                        attached: attached_payment,
                    });
                }
                self.backend
                    .token_transfer_from(token, from, self.vault, amount)?;
                let held = self.held_tokens.entry(token).or_default();
                *held = held
                    .checked_add(amount)
                    .ok_or_else(|| EscrowError::Internal("custody overflow".into()))?;
            }
        }
        Ok(())
    }

    /// Push `amount` of `asset` from the vault to `to`.
    ///
    /// # Errors
    /// `Internal` if the custody counter would underflow, or the backend's
    /// transfer error. On error the counters are untouched — custody is
    /// never silently lost.
    pub fn payout(&mut self, to: AccountId, asset: AssetKind, amount: u128) -> Result<()> {
        match asset {
            AssetKind::Native => {
                if self.held_native < amount {
                    return Err(EscrowError::Internal("custody underflow".into()));
                }
                self.backend.native_transfer(self.vault, to, amount)?;
                self.held_native -= amount;
            }
            AssetKind::Token(token) => {
                let held = self.held_tokens.get(&token).copied().unwrap_or(0);
                if held < amount {
                    return Err(EscrowError::Internal("custody underflow".into()));
                }
                self.backend.token_transfer(token, self.vault, to, amount)?;
                self.held_tokens.insert(token, held - amount);
            }
        }
        Ok(())
    }

    /// Return escrow to the seller. Identical to a payout addressed at the
    /// original depositor.
    pub fn refund(&mut self, seller: AccountId, asset: AssetKind, amount: u128) -> Result<()> {
        self.payout(seller, asset, amount)
    }

    /// Current custody for `asset` according to the adapter's own books.
    #[must_use]
    pub fn held(&self, asset: AssetKind) -> u128 {
        match asset {
            AssetKind::Native => self.held_native,
            AssetKind::Token(token) => self.held_tokens.get(&token).copied().unwrap_or(0),
        }
    }

    /// The vault account escrowed value sits in.
    #[must_use]
    pub fn vault(&self) -> AccountId {
        self.vault
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn checked_held_add(&self, held: u128, amount: u128) -> Result<u128> {
        held.checked_add(amount)
            .ok_or_else(|| EscrowError::Internal("custody overflow".into()))
    }
}
