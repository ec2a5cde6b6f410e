use super::{BgmConfig, CharacterId, SceneInfo, TableLine};
use crate::scene::Background;

pub static BGM: Option<BgmConfig> = None;

const fn image_scene(id: u32, title: &'static str, image: &'static str) -> SceneInfo {
    SceneInfo {
        id,
        title,
        background: Background::Image,
        background_image: Some(image),
        background_color: None,
    }
}

pub static SCENES: &[SceneInfo] = &[
    image_scene(1, "シーン1", "imported/260207_1.png"),
    image_scene(2, "シーン2", "imported/260207_2.png"),
    image_scene(3, "シーン3", "imported/260207_3.png"),
    image_scene(4, "シーン4", "imported/260207_4.png"),
    image_scene(5, "シーン5", "imported/260207_5.png"),
    image_scene(6, "シーン6", "imported/260207_6.png"),
    image_scene(7, "シーン7", "imported/260207_7.png"),
];

pub static SCRIPT: &[TableLine] = &[
    TableLine {
        id: 1,
        character: CharacterId::Zundamon,
        text: "2月7日、今日はフナの日。運気の波に乗ってスイスイ進めるのはどの星座？",
        display_text: Some("2月7日の運勢ランキング"),
        scene: 1,
        voice_file: "01_zundamon.wav",
        duration_in_frames: 240,
        pause_after: 10,
        emotion: None,
        visual: None,
        se: None,
    },
    TableLine {
        id: 3,
        character: CharacterId::Gaoyan,
        text: "10位から12位の運勢はこちら。深呼吸して、自分を労わる時間を作ってね。",
        display_text: Some(
            "10位 魚座：無理せず休息を（水色） 11位 射手座：忘れ物に注意（ポーチ） 12位 乙女座：優先順位を整理（白）",
        ),
        scene: 2,
        voice_file: "03_gaoyan.wav",
        duration_in_frames: 221,
        pause_after: 10,
        emotion: None,
        visual: None,
        se: None,
    },
    TableLine {
        id: 5,
        character: CharacterId::Zundamon,
        text: "第3位は、おひつじ座。直感が冴えわたる日！迷わず進むのが正解だよ。",
        display_text: Some("3位 牡羊座：直感を信じて即行動（赤色/スニーカー/朝の散歩）"),
        scene: 3,
        voice_file: "05_zundamon.wav",
        duration_in_frames: 252,
        pause_after: 10,
        emotion: None,
        visual: None,
        se: None,
    },
    TableLine {
        id: 7,
        character: CharacterId::Gaoyan,
        text: "第2位は、ふたご座。コミュニケーションが絶好調！懐かしい人から連絡があるかも。",
        display_text: Some("3位 牡羊座：直感を信じて即行動（赤色/スニーカー/朝の散歩）"),
        scene: 4,
        voice_file: "07_gaoyan.wav",
        duration_in_frames: 226,
        pause_after: 10,
        emotion: None,
        visual: None,
        se: None,
    },
    TableLine {
        id: 10,
        character: CharacterId::Zundamon,
        text: "栄光の第1位は、しし座！あなたの魅力が爆発する最高の日。今日はあなたが主役だよ！",
        display_text: Some("3位 牡羊座：直感を信じて即行動（赤色/スニーカー/朝の散歩）"),
        scene: 5,
        voice_file: "10_zundamon.wav",
        duration_in_frames: 289,
        pause_after: 10,
        emotion: None,
        visual: None,
        se: None,
    },
    TableLine {
        id: 14,
        character: CharacterId::Gaoyan,
        text: "最後に今日の名言。人生とは、自分を見つけることではない。自分を創ることだ。",
        display_text: Some("人生とは、自分を見つけることではない。自分を創ることだ。"),
        scene: 6,
        voice_file: "14_gaoyan.wav",
        duration_in_frames: 231,
        pause_after: 10,
        emotion: None,
        visual: None,
        se: None,
    },
    TableLine {
        id: 16,
        character: CharacterId::Zundamon,
        text: "願い事をコメントしてね！あなたの元に幸運が届きますように。",
        display_text: Some("願い事をコメントしてね！ 幸運が届きますように"),
        scene: 7,
        voice_file: "16_zundamon.wav",
        duration_in_frames: 189,
        pause_after: 10,
        emotion: None,
        visual: None,
        se: None,
    },
];
