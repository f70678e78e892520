//! Continuation-token pagination for list operations

use crate::operation::Operation;

/// A list operation whose output carries a continuation token.
///
/// [`Client::paginate`](crate::Client::paginate) sends the request without a
/// token, then re-sends a clone with each token the previous page returned.
pub trait Paginated: Operation + Clone {
    /// Set the request's continuation token.
    fn set_token(&mut self, token: String);

    /// Continuation token of a page, if there are more pages.
    fn next_token(output: &Self::Output) -> Option<String>;
}

/// `paginated!(ListQueuesRequest, next_token => next_token);`
macro_rules! paginated {
    ($input:ty, $request_field:ident => $output_field:ident) => {
        impl $crate::paginate::Paginated for $input {
            fn set_token(&mut self, token: String) {
                self.$request_field = ::stratus_core::Optional::Present(token);
            }

            fn next_token(
                output: &<Self as $crate::operation::Operation>::Output,
            ) -> Option<String> {
                output.$output_field.get().cloned()
            }
        }
    };
}

pub(crate) use paginated;
