entity_id!(
    /// Identifier of a user account (set owner, order customer).
    UserId,
    "user"
);
