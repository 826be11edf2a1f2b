//! 音声コマンドの照合
//!
//! 認識済みのテキストを固定のコマンド表と照合する。
//! 音声認識・読み上げ自体は各フロントエンドの責務。

/// 画面遷移先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Scan,
    History,
    Settings,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::Scan => "/scan",
            Route::History => "/history",
            Route::Settings => "/settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    ScanCattle,
    ShowHistory,
    GoHome,
    Settings,
    LastResult,
}

pub const NOT_UNDERSTOOD: &str = "Sorry, I didn't understand that command";

impl VoiceCommand {
    /// 照合順
    pub const ALL: [VoiceCommand; 5] = [
        VoiceCommand::ScanCattle,
        VoiceCommand::ShowHistory,
        VoiceCommand::GoHome,
        VoiceCommand::Settings,
        VoiceCommand::LastResult,
    ];

    pub fn phrase(&self) -> &'static str {
        match self {
            VoiceCommand::ScanCattle => "Scan cattle",
            VoiceCommand::ShowHistory => "Show history",
            VoiceCommand::GoHome => "Go home",
            VoiceCommand::Settings => "Settings",
            VoiceCommand::LastResult => "Last result",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VoiceCommand::ScanCattle => "Open camera to scan",
            VoiceCommand::ShowHistory => "View past scans",
            VoiceCommand::GoHome => "Return to home",
            VoiceCommand::Settings => "Open settings",
            VoiceCommand::LastResult => "Show recent scan",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            VoiceCommand::ScanCattle => Route::Scan,
            VoiceCommand::ShowHistory | VoiceCommand::LastResult => Route::History,
            VoiceCommand::GoHome => Route::Home,
            VoiceCommand::Settings => Route::Settings,
        }
    }

    /// 読み上げる応答
    pub fn acknowledgement(&self) -> String {
        format!("Okay, {}", self.phrase())
    }
}

/// 認識テキストにフレーズが含まれる最初のコマンドを返す（大文字小文字を区別しない）
pub fn match_command(transcript: &str) -> Option<VoiceCommand> {
    let text = transcript.to_lowercase();
    VoiceCommand::ALL
        .into_iter()
        .find(|cmd| text.contains(&cmd.phrase().to_lowercase()))
}

/// 音声コマンドへの応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceReply {
    /// 一致したコマンド（なければ画面遷移しない）
    pub command: Option<VoiceCommand>,
    /// 読み上げ・表示する応答文
    pub text: String,
}

impl VoiceReply {
    pub fn for_command(command: Option<VoiceCommand>) -> Self {
        let text = match command {
            Some(cmd) => cmd.acknowledgement(),
            None => NOT_UNDERSTOOD.to_string(),
        };
        Self { command, text }
    }

    /// 遷移先（一致しなければNone）
    pub fn route(&self) -> Option<Route> {
        self.command.map(|cmd| cmd.route())
    }
}

/// 認識テキストを照合して応答を組み立てる
pub fn reply_for(transcript: &str) -> VoiceReply {
    VoiceReply::for_command(match_command(transcript))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_exact_phrase() {
        assert_eq!(match_command("scan cattle"), Some(VoiceCommand::ScanCattle));
        assert_eq!(match_command("Go Home"), Some(VoiceCommand::GoHome));
    }

    #[test]
    fn test_match_inside_sentence() {
        assert_eq!(
            match_command("please show history now"),
            Some(VoiceCommand::ShowHistory)
        );
        assert_eq!(
            match_command("open the SETTINGS"),
            Some(VoiceCommand::Settings)
        );
    }

    #[test]
    fn test_first_match_wins() {
        // 表の順で先に出るコマンドが優先
        assert_eq!(
            match_command("go home and then settings"),
            Some(VoiceCommand::GoHome)
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_command("milk the cow"), None);
        let reply = reply_for("milk the cow");
        assert_eq!(reply.text, NOT_UNDERSTOOD);
        assert_eq!(reply.command, None);
        assert_eq!(reply.route(), None);
    }

    #[test]
    fn test_routes() {
        assert_eq!(VoiceCommand::LastResult.route(), Route::History);
        assert_eq!(VoiceCommand::ScanCattle.route().path(), "/scan");
        let reply = reply_for("last result");
        assert_eq!(reply.text, "Okay, Last result");
        assert_eq!(reply.command, Some(VoiceCommand::LastResult));
        assert_eq!(reply.route(), Some(Route::History));
    }

    #[test]
    fn test_reply_for_button_press() {
        for command in VoiceCommand::ALL {
            let reply = VoiceReply::for_command(Some(command));
            assert_eq!(reply.text, format!("Okay, {}", command.phrase()));
            assert_eq!(reply.route(), Some(command.route()));
            // フレーズ自体を話した場合と同じ応答
            assert_eq!(reply_for(command.phrase()), reply);
        }
    }
}
