use crate::{Media, Options, ReferenceData, Stage, StageMask, resolve, resolve_verbose_with, run_pipeline};

fn shipped() -> ReferenceData {
    ReferenceData::from_sources(
        include_str!("../../data/category.csv"),
        include_str!("../../data/emotion.yaml"),
        include_str!("../../data/style.yaml"),
    )
    .unwrap()
}

#[test]
fn classification_examples_matching() {
    // (level_one, level_two, stage, input)
    let cases: Vec<(&str, &str, Stage, &str)> = vec![
        ("美容・ヘルスケア", "スキンケア", Stage::PitchKeyword, "敏感肌でも使える低刺激の保湿クリーム"),
        ("ギフト・プレゼント", "ギフトセット", Stage::Hint, "プレゼントに合う高級ハンドクリームを探している"),
        ("ギフト・プレゼント", "記念日ギフト", Stage::LevelTwo, "記念日ギフトにぴったりの名入れグラス"),
        ("食品・飲料", "ドリンク", Stage::LevelOne, "食品・飲料のまとめ買い"),
        ("食品・飲料", "ドリンク", Stage::Hint, "深煎りのコーヒー豆"),
        ("ペット用品", "ペットフード", Stage::Hint, "シニア犬のためのフード"),
        ("ホビー・ゲーム", "ゲーム・VR", Stage::Hint, "VRゴーグル対応タイトル"),
        ("日用品・生活雑貨", "掃除・収納", Stage::Hint, "キッチンの収納ラック"),
        // "軽量" is first listed under ファッション/バッグ.
        ("ファッション", "バッグ", Stage::PitchKeyword, "キャンプで使える軽量の折りたたみチェア"),
        ("美容・ヘルスケア", "スキンケア", Stage::Fallback, "hello world"),
        ("美容・ヘルスケア", "スキンケア", Stage::Fallback, ""),
    ];

    let data = shipped();
    for (level_one, level_two, stage, input) in cases {
        let res = resolve_verbose_with(&data, input, Media::Lp, &Options::default());
        assert_eq!(res.result.category.level_one, level_one, "{input}");
        assert_eq!(res.result.category.level_two, level_two, "{input}");
        assert_eq!(res.details.stage, stage, "{input}");
    }
}

#[test]
fn emotion_and_style_examples() {
    // (emotion, style, input)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("安心", "gentle", "敏感肌向けのスキンケア"),
        ("特別感", "elegant", "記念日ギフトにぴったりの名入れグラス"),
        ("特別感", "elegant", "プレゼントに合う高級ハンドクリームを探している"),
        ("癒し", "gentle", "深煎りのコーヒー豆"),
        ("ワクワク", "pop", "VRゴーグル対応タイトル"),
        ("安心", "plain", "キッチンの収納ラック"),
    ];

    let data = shipped();
    for (emotion, style, input) in cases {
        let res = resolve(&data, input, Media::Lp);
        assert_eq!(res.emotion.id, emotion, "{input}");
        assert_eq!(res.style.id, style, "{input}");
    }
}

#[test]
fn media_changes_only_channel_formatting() {
    let data = shipped();
    let input = "深煎りのコーヒー豆";

    let lp = resolve(&data, input, Media::Lp);
    let ad = resolve(&data, input, Media::Ad);
    let social = resolve(&data, input, Media::Social);

    assert_eq!((lp.style.sentence_length.as_str(), lp.style.use_emoji), ("long", false));
    assert_eq!((ad.style.sentence_length.as_str(), ad.style.use_emoji), ("very_short", true));
    assert_eq!((social.style.sentence_length.as_str(), social.style.use_emoji), ("long", true));
    assert_eq!(lp.category, ad.category);
    assert_eq!(lp.emotion, social.emotion);
}

#[test]
fn dropped_rows_never_classify() {
    let data = shipped();
    assert!(data.taxonomy().iter().all(|e| e.level_one != "家電"));

    let res = resolve_verbose_with(&data, "家電がほしい", Media::Lp, &Options::default());
    assert_eq!(res.details.stage, Stage::Fallback);
}

#[test]
fn hint_stage_can_be_disabled() {
    let data = shipped();
    let options = Options { stages: StageMask::all() - StageMask::HINT };
    let res = resolve_verbose_with(&data, "プレゼントに合う高級ハンドクリームを探している", Media::Lp, &options);
    assert_eq!(res.details.stage, Stage::Fallback);
    assert_eq!(res.result.category.level_two, "スキンケア");
}

#[test]
fn pipeline_is_deterministic() {
    let data = shipped();
    let inputs = ["記念日ギフト", "hello", "シニア犬のためのフード", ""];

    let first = serde_json::to_string(&run_pipeline(&data, &inputs, Media::Social)).unwrap();
    let second = serde_json::to_string(&run_pipeline(&data, &inputs, Media::Social)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn resolutions_share_reference_data_across_threads() {
    let data = shipped();
    let inputs = ["敏感肌向けのスキンケア", "深煎りのコーヒー豆", "VRゴーグル対応タイトル", "キッチンの収納ラック"];
    let sequential = run_pipeline(&data, &inputs, Media::Ad);

    let shared = &data;
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs.iter().map(|input| scope.spawn(move || resolve(shared, input, Media::Ad))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, sequential);
}
