//! 集成测试 - 规则文本到日志输出的端到端测试

mod common;

use common::{buffered_factory, entries, rules_of};
use conlog::config::{
    ConfigLoader, EnvSource, JsonFileProfileStore, Profile, ProfileStore, ENV_LEVELS,
    ENV_PROFILE, ENV_WIDTH,
};
use conlog::log::{NameColumn, ShortNameState};
use conlog::{normalize, pretty, Level, LogConfig, RuleText};

#[test]
fn test_inheritance_example() {
    let rules = rules_of("com.mypackage.:trace\nMyClass\nMyOtherClass:error\nMyThirdClass");

    assert_eq!(rules.resolve("com.mypackage.MyClass", Level::Info), Level::Trace);
    assert_eq!(rules.resolve("com.mypackage.MyOtherClass", Level::Info), Level::Error);
    assert_eq!(rules.resolve("com.mypackage.MyThirdClass", Level::Info), Level::Trace);
    assert_eq!(rules.get("com.mypackage"), None);
    assert_eq!(rules.get("com.mypackage."), None);
    assert_eq!(rules.len(), 3);
}

#[test]
fn test_fully_qualified_shorthand_equivalence() {
    let forms = [
        "com.mypackage.MyClass: debug",
        "com.mypackage.MyClass:d",
        "com.mypackage.MyClass=DEBUG",
    ];
    for form in forms {
        assert_eq!(normalize(form), "com.mypackage.MyClass:debug\n", "form: {form}");
        assert_eq!(
            entries(&rules_of(form)),
            vec![("com.mypackage.MyClass".to_string(), "debug".to_string())]
        );
    }
}

#[test]
fn test_prefix_resolution_order() {
    let rules = rules_of("a.b:warn\na.b.c:debug");
    assert_eq!(rules.resolve("a.b.c.D", Level::Info), Level::Debug);
    assert_eq!(rules.resolve("a.b.x", Level::Info), Level::Warn);
    assert_eq!(rules.resolve("a.z", Level::Error), Level::Error);
}

#[test]
fn test_round_trip_through_pretty() {
    let inputs = [
        "com.mypackage.:trace\nMyClass\nMyOtherClass:error\nMyThirdClass",
        "# header\n\norg.x.Reader = w\n  Writer\n\norg.y.:e\nz.Q:d\nTail\n",
        "a:b:c\nlone\nx.y.:o\n  Child : i",
    ];
    for raw in inputs {
        let canonical = normalize(raw);
        let shown = pretty(&canonical);
        assert_eq!(
            RuleText::from_user(&shown).rules(),
            RuleText::from_canonical(canonical.clone()).rules(),
            "input: {raw:?}"
        );
        assert_eq!(normalize(&canonical), canonical, "idempotence: {raw:?}");
    }
}

#[test]
fn test_comment_and_blank_preservation() {
    let raw = "# top\n\ncom.a.:t\n# middle\nB\n\n# end\n";
    let canonical = normalize(raw);
    let shown = pretty(&canonical);

    for text in [&canonical, &shown] {
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "# top");
        assert_eq!(lines[1], "");
        assert_eq!(lines[3], "# middle");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "# end");
    }
    assert_eq!(shown.lines().nth(4), Some("   B"));
}

#[test]
fn test_uppercase_heuristic_limitation() {
    // 以大写开头的包名段被当作类名替换，小写开头的类名被当作包名追加
    let rules = rules_of("com.Vendor:debug\nutil\norg.app.client:warn\nHelper");
    assert_eq!(rules.get("com.util"), Some(Level::Debug));
    assert_eq!(rules.get("com.Vendor.util"), None);
    assert_eq!(rules.get("org.app.client.Helper"), Some(Level::Warn));
}

#[test]
fn test_two_character_lines_skip_cleanup() {
    // 两个字符以内的行不做整理；美化时加上缩进后，再次规范化才会整理
    let raw = "com.a.:d\nb=";
    assert_eq!(rules_of(raw).get("com.a.b="), Some(Level::Debug));

    let shown = pretty(&normalize(raw));
    assert_eq!(shown, "com.a. : debug\n   b=\n");
    let reread = rules_of(&shown);
    assert_eq!(reread.get("com.a.b"), Some(Level::Debug));
    assert_eq!(reread.get("com.a.b="), None);
}

#[test]
fn test_level_resolved_once_per_logger() {
    let (factory, buffer) = buffered_factory("com.app:error", 10);
    let early = factory.logger("com.app.Service");

    factory.reload(rules_of("com.app:trace"));
    let late = factory.logger("com.app.Service");

    assert_eq!(early.level(), Level::Error);
    assert_eq!(late.level(), Level::Trace);

    conlog::debug!(early, "not printed");
    conlog::debug!(late, "printed");
    assert_eq!(buffer.lines(), vec!["Service     d| printed"]);
}

#[test]
fn test_consecutive_output_dedup() {
    let (factory, buffer) = buffered_factory("com.app:trace", 10);
    let view = factory.logger("com.app.View");
    let model = factory.logger("com.app.Model");

    conlog::info!(view, "one");
    conlog::info!(view, "two");
    conlog::warn!(model, "three");
    conlog::error!(view, "four");

    assert_eq!(
        buffer.lines(),
        vec![
            "View        i| one",
            "..          i| two",
            "Model       W| three",
            "View        E| four",
        ]
    );
}

#[test]
fn test_alternating_names_never_consecutive_continuations() {
    let column = NameColumn::new(10);
    let state = ShortNameState::new();
    let a = column.shorten("x.Alpha");
    let b = column.shorten("x.Beta");

    let tokens: Vec<String> = [&a, &b, &a, &b, &a]
        .into_iter()
        .map(|short| column.render(short, &state).to_string())
        .collect();
    assert!(tokens.iter().all(|token| !token.starts_with("..")));
}

#[test]
fn test_off_silences_logger() {
    let (factory, buffer) = buffered_factory("com.noisy.:off\nChatty", 10);
    let chatty = factory.logger("com.noisy.Chatty");
    assert_eq!(chatty.level(), Level::Off);
    conlog::error!(chatty, "never");
    assert!(buffer.is_empty());
}

#[test]
fn test_profile_store_to_factory() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileProfileStore::new(dir.path().join("profiles.json"));
    store
        .update(|book| {
            book.save_profile("dev", Profile::from_user("com.app.:d\nView", true, 6))?;
            book.save_profile("quiet", Profile::from_user("com.app:e", false, 10))?;
            book.select("dev")
        })
        .unwrap();

    let config = ConfigLoader::new()
        .with_store(&store)
        .with_env(EnvSource::default())
        .load();
    assert!(config.settings.include_time);
    assert_eq!(config.settings.column_width, 6);

    let (factory, buffer) = LogConfig::from_console_config(&config)
        .with_state(ShortNameState::new())
        .with_buffer(10)
        .init();
    let view = factory.logger("com.app.View");
    assert_eq!(view.level(), Level::Debug);

    conlog::debug!(view, "rendered");
    let line = buffer.unwrap().lines().remove(0);
    // HH:MM:SS.mmm + 空格 + 名称列
    assert_eq!(line.len(), "00:00:00.000 ".len() + "View    d| rendered".len());
    assert!(line.ends_with("View    d| rendered"));

    // 环境变量切换 profile 并覆盖宽度
    let env = EnvSource::from_pairs([(ENV_PROFILE, "quiet"), (ENV_WIDTH, "3")]);
    let config = ConfigLoader::new().with_store(&store).with_env(env).load();
    assert_eq!(config.rules.resolve("com.app.View", Level::Info), Level::Error);
    assert_eq!(config.settings.column_width, 3);
}

#[test]
fn test_environment_rules_override_properties() {
    let dir = tempfile::tempdir().unwrap();
    let properties = dir.path().join("conlog.properties");
    std::fs::write(&properties, "com.app=debug\ncom.lib=warn\n").unwrap();

    let env = EnvSource::from_pairs([(ENV_LEVELS, "com.app=error")]);
    let config = ConfigLoader::new()
        .with_properties_file(&properties)
        .with_env(env)
        .load();

    assert_eq!(config.rules.resolve("com.app.X", Level::Info), Level::Error);
    assert_eq!(config.rules.resolve("com.lib.Y", Level::Info), Level::Warn);
}

#[test]
fn test_rules_export_with_prefix() {
    let rules = rules_of("com.a.:w\nB\nC:e");
    let exported = rules.to_properties(conlog::config::KEY_PREFIX);
    assert_eq!(exported.get("conlog.com.a.B").map(String::as_str), Some("warn"));
    assert_eq!(exported.get("conlog.com.a.C").map(String::as_str), Some("error"));
    assert_eq!(exported.len(), 2);
}
