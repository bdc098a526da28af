use anchor_lang::error_code;

#[error_code]
pub enum CrowdfundError {
    #[msg("Campaign name is longer than 32 bytes.")]
    NameTooLong,

    #[msg("Funding goal must be greater than zero.")]
    InvalidGoal,

    #[msg("Deadline must be in the future.")]
    DeadlineInPast,

    #[msg("Contribution amount must be greater than zero.")]
    InvalidAmount,

    #[msg("Campaign has ended. You can no longer contribute.")]
    CampaignEnded,

    #[msg("Campaign has not ended yet.")]
    CampaignNotEnded,

    #[msg("Funds already claimed.")]
    AlreadyClaimed,

    #[msg("Goal not met.")]
    GoalNotMet,

    #[msg("Goal met, cannot refund.")]
    GoalMetCannotRefund,

    #[msg("Only the campaign creator can withdraw.")]
    NotCreator,

    #[msg("Numerical overflow occurred.")]
    NumericalOverflow,

    #[msg("Account passed is incorrect.")]
    IncorrectAccount,

    #[msg("Vault does not hold enough lamports to cover the refund.")]
    InsufficientCustody,
}
