use crate::Hint;

pub(crate) fn get() -> Vec<Hint> {
    vec![
        // Gift intent outranks the product itself ("プレゼント用のハンドクリーム").
        hint! {
            name: "gift",
            pattern: r"ギフト|プレゼント|贈り物|贈答|お祝い|内祝い?|誕生日|記念日|母の日|父の日|お中元|お歳暮",
            level_one: "ギフト・プレゼント",
        },
        hint! {
            name: "skincare",
            pattern: r"化粧水|美容液|乳液|クリーム|保湿|スキンケア|コスメ|日焼け止め|洗顔",
            level_one: "美容・ヘルスケア",
            level_two: "スキンケア",
        },
        hint! {
            name: "beverage",
            pattern: r"コーヒー|珈琲|紅茶|お茶|緑茶|ジュース|ビール|ワイン|日本酒|焼酎|ドリンク|飲料",
            level_one: "食品・飲料",
            level_two: "ドリンク",
        },
        hint! {
            name: "confectionery",
            pattern: r"お菓子|菓子|スイーツ|チョコ|クッキー|ケーキ|プリン|せんべい|焼き菓子",
            level_one: "食品・飲料",
            level_two: "スイーツ・お菓子",
        },
        hint! {
            name: "baby",
            pattern: r"ベビー|赤ちゃん|乳児|新生児|おむつ|オムツ|離乳食|抱っこ紐|ベビーカー",
            level_one: "キッズ・ベビー",
            level_two: "ベビー用品",
        },
        hint! {
            name: "pet_food",
            pattern: r"ペットフード|ドッグフード|キャットフード|おやつ.*(犬|猫)|(犬|猫).*(ごはん|フード)",
            level_one: "ペット用品",
            level_two: "ペットフード",
        },
        hint! {
            name: "outdoor_apparel",
            pattern: r"アウトドア|キャンプ|登山|トレッキング|ランニング|ジョギング|ヨガ|スポーツウェア|トレーニングウェア",
            level_one: "スポーツ・アウトドア",
            level_two: "ウェア",
        },
        hint! {
            name: "game_xr",
            pattern: r"(?i)ゲーム|メタバース|ゴーグル|(?:^|[^a-z])(?:vr|ar|xr)(?:[^a-z]|$)",
            level_one: "ホビー・ゲーム",
            level_two: "ゲーム・VR",
        },
        hint! {
            name: "cleaning_storage",
            pattern: r"掃除|洗剤|クリーナー|モップ|収納|片付け|整理|ラック|ボックス",
            level_one: "日用品・生活雑貨",
            level_two: "掃除・収納",
        },
    ]
}
