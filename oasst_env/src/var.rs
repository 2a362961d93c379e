use thiserror::Error;

/// The error produced when an environment variable cannot be read
#[derive(Debug, Error)]
#[error("An error occurred while reading envvar: {var_name}. Err: {err}")]
pub struct VarNameErr {
    var_name: &'static str,
    err: std::env::VarError,
}

impl VarNameErr {
    /// The name of the variable which failed to be read
    pub fn var_name(&self) -> &'static str {
        self.var_name
    }
}

#[cfg(test)]
mod harness {
    use super::VarNameErr;
    use std::cell::Cell;

    type MockGetter = Cell<Option<Box<dyn Fn(&'static str) -> Result<String, std::env::VarError>>>>;
    thread_local! {
        static MOCK_VAR_GETTER: MockGetter = const { Cell::new(None) };
    }

    /// Read the environment variable `s`, consulting the test mock first
    pub fn read_env(s: &'static str) -> Result<String, VarNameErr> {
        match MOCK_VAR_GETTER.replace(None) {
            Some(mock) => {
                let out = mock(s);
                MOCK_VAR_GETTER.replace(Some(mock));
                out
            }
            None => std::env::var(s),
        }
        .map_err(|err| VarNameErr { var_name: s, err })
    }

    pub(crate) fn with_mock_env<F, Cb, U>(f: F, cb: Cb) -> U
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError> + 'static,
        Cb: FnOnce() -> U,
    {
        MOCK_VAR_GETTER.replace(Some(Box::new(f)));
        let output = cb();
        MOCK_VAR_GETTER.replace(None);
        output
    }
}

#[cfg(test)]
pub use harness::read_env;

#[cfg(test)]
pub(crate) use harness::with_mock_env;

/// Read the environment variable `s`
#[cfg(not(test))]
pub fn read_env(s: &'static str) -> Result<String, VarNameErr> {
    std::env::var(s).map_err(|err| VarNameErr { var_name: s, err })
}

/// Declare a sentinel type for an environment variable.
///
/// The variable name is the SCREAMING_SNAKE_CASE form of the type name, so
/// `struct OasstApiUrl;` reads `OASST_API_URL`. A braced form declares one
/// sentinel per field plus a struct bundling all of them.
#[macro_export]
macro_rules! env_var {
    (
        $(#[$attr:meta])*
        $v:vis struct $n:ident;
    ) => {
        $crate::paste::paste! {
            #[doc = "Sentinel for the `" $n:snake:upper "` environment variable."]
            $(#[$attr])*
            $v enum $n {
                #[doc = "The value was read from the environment at runtime"]
                Runtime(std::sync::Arc<str>),
                #[doc = "The value is a static string, either a default or a test fixture"]
                Static(&'static str),
            }

            impl $n {
                #[doc = "The name of the environment variable"]
                #[allow(dead_code)]
                $v const NAME: &'static str = stringify!([<$n:snake:upper>]);

                #[doc = "Read `" $n:snake:upper "` from the environment"]
                #[allow(dead_code)]
                #[tracing::instrument(err, level = tracing::Level::TRACE)]
                $v fn new() -> Result<Self, $crate::VarNameErr> {
                    let res = $crate::read_env(Self::NAME)?;
                    Ok(Self::Runtime(std::sync::Arc::from(res)))
                }

                #[doc = "Read `" $n:snake:upper "` from the environment, using `default` when it is unset"]
                #[allow(dead_code)]
                $v fn new_or(default: &'static str) -> Self {
                    Self::new().unwrap_or(Self::Static(default))
                }

                #[doc = "Construct the value from a static string"]
                #[allow(dead_code)]
                $v const fn from_static(s: &'static str) -> Self {
                    Self::Static(s)
                }

                #[doc = "Returns an `Arc<str>` of the contained value"]
                #[allow(dead_code)]
                $v fn as_arc(&self) -> std::sync::Arc<str> {
                    match self {
                        Self::Static(i) => std::sync::Arc::from(*i),
                        Self::Runtime(i) => i.clone(),
                    }
                }
            }

            impl std::ops::Deref for $n {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    match self {
                        Self::Runtime(i) => i.as_ref(),
                        Self::Static(i) => i,
                    }
                }
            }

            impl std::convert::AsRef<str> for $n {
                fn as_ref(&self) -> &str {
                    &**self
                }
            }

            impl std::fmt::Debug for $n {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_tuple(stringify!($n)).field(&"<redacted>").finish()
                }
            }
        }
    };
    (
        $(#[$attr:meta])*
        $v:vis struct $n:ident {
            $(
                $(#[$field_attr:meta])*
                $field_vis:vis $field_name:ident
            ),* $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $(
                $crate::env_var!(
                    $(#[$field_attr])*
                    $field_vis struct $field_name;
                );
            )*

            $(#[$attr])*
            $v struct $n {
                $(
                    #[doc = "value of `" $field_name:snake:upper "`"]
                    pub [<$field_name:snake>]: $field_name,
                )*
            }

            impl $n {
                #[doc = "Read every variable of this group, failing on the first missing one"]
                #[allow(dead_code)]
                $v fn new() -> Result<Self, $crate::VarNameErr> {
                    Ok(Self {
                        $(
                            [<$field_name:snake>]: $field_name::new()?,
                        )*
                    })
                }
            }
        }
    };
}
