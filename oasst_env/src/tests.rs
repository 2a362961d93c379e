use super::*;
use std::env::VarError;

crate::env_var!(
    #[derive(Clone)]
    struct OasstApiUrl;
);

crate::env_var!(
    struct Group {
        FirstValue,
        SecondValue,
    }
);

#[test]
fn it_reads_the_screaming_snake_case_name() {
    let val = with_mock_env(
        |name| match name {
            "OASST_API_URL" => Ok("http://backend:8080".to_string()),
            _ => Err(VarError::NotPresent),
        },
        OasstApiUrl::new,
    )
    .unwrap();

    assert_eq!(&*val, "http://backend:8080");
    assert_eq!(OasstApiUrl::NAME, "OASST_API_URL");
}

#[test]
fn it_reports_the_missing_variable() {
    let err = with_mock_env(|_| Err(VarError::NotPresent), OasstApiUrl::new).unwrap_err();
    assert_eq!(err.var_name(), "OASST_API_URL");
}

#[test]
fn it_falls_back_to_the_default() {
    let val = with_mock_env(|_| Err(VarError::NotPresent), || OasstApiUrl::new_or("fallback"));
    assert_eq!(val.as_ref(), "fallback");
    assert!(matches!(val, OasstApiUrl::Static(_)));
}

#[test]
fn it_redacts_debug_output() {
    let val = OasstApiUrl::from_static("super-secret");
    assert!(!format!("{val:?}").contains("super-secret"));
}

#[test]
fn group_requires_every_value() {
    let res = with_mock_env(
        |name| match name {
            "FIRST_VALUE" => Ok("1".to_string()),
            _ => Err(VarError::NotPresent),
        },
        Group::new,
    );
    assert_eq!(res.err().unwrap().var_name(), "SECOND_VALUE");

    let group = with_mock_env(|_| Ok("x".to_string()), Group::new).unwrap();
    assert_eq!(&*group.first_value, "x");
    assert_eq!(&*group.second_value, "x");
}

#[test]
fn environment_parses_known_values() {
    assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
    assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Develop);
    assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
    assert!("staging".parse::<Environment>().is_err());
}

#[test]
fn environment_defaults_to_production() {
    let env = with_mock_env(|_| Err(VarError::NotPresent), Environment::new_or_prod);
    assert_eq!(env, Environment::Production);

    let env = with_mock_env(|_| Ok("local".to_string()), Environment::new_or_prod);
    assert_eq!(env, Environment::Local);
}

#[test]
fn environment_display_round_trips() {
    for env in [
        Environment::Production,
        Environment::Develop,
        Environment::Local,
    ] {
        assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
    }
}
